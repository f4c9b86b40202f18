use super::*;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::get().to(list)));
    cfg.service(web::resource("{activity_name}/signup").route(web::post().to(signup)));
    cfg.service(
        web::resource("{activity_name}/participants").route(web::delete().to(remove)),
    );
}

impl ResponseError for RegistryError {
    fn status_code(&self) -> StatusCode {
        match self {
            RegistryError::ActivityNotFound(_) => StatusCode::NOT_FOUND,
            RegistryError::ParticipantNotFound { .. } => StatusCode::NOT_FOUND,
            RegistryError::AlreadyRegistered { .. } => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        debug!("{:?}", &self);
        HttpResponse::build(self.status_code()).json(ErrorDetail {
            detail: self.to_string(),
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ParamEmail {
    email: String,
}

async fn list(reg: Data<Registry>) -> impl Responder {
    Json(reg.get_all())
}

async fn signup(
    reg: Data<Registry>,
    path: Path<String>,
    Query(ParamEmail { email }): Query<ParamEmail>,
) -> ::aw::Result<impl Responder, RegistryError> {
    let activity_name = path.into_inner();
    reg.add_participant(&activity_name, &email)?;

    Ok(Json(Message {
        message: format!("Signed up {} for {}", email, activity_name),
    }))
}

async fn remove(
    reg: Data<Registry>,
    path: Path<String>,
    Query(ParamEmail { email }): Query<ParamEmail>,
) -> ::aw::Result<impl Responder, RegistryError> {
    let activity_name = path.into_inner();
    reg.remove_participant(&activity_name, &email)?;

    Ok(Json(Message {
        message: format!("Removed {} from {}", email, activity_name),
    }))
}

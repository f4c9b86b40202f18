use ::aw::{
    body::BoxBody,
    error::{InternalError, QueryPayloadError},
    http::StatusCode,
    web::{self, Data, Json, Path, Query, Redirect},
    HttpRequest, HttpResponse, Responder, ResponseError,
};
use ::log::debug;
use ::serde::{Deserialize, Serialize};

use crate::state::*;

mod activities;
mod index;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(query_error));
    cfg.service(web::resource("/").route(web::get().to(index::get)));
    cfg.service(web::scope("/activities").configure(activities::config));
}

/// тело ответа с ошибкой: `{"detail": "..."}`
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

/// тело успешного ответа на изменение списка: `{"message": "..."}`
#[derive(Debug, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

// отсутствующий или кривой query-параметр
fn query_error(err: QueryPayloadError, req: &HttpRequest) -> ::aw::Error {
    debug!("bad query `{}` for {}: {}", req.query_string(), req.path(), err);

    let res = HttpResponse::UnprocessableEntity().json(ErrorDetail {
        detail: err.to_string(),
    });
    InternalError::from_response(err, res).into()
}

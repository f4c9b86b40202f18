use super::*;

pub const INDEX_PAGE: &str = "/static/index.html";

pub async fn get() -> impl Responder {
    Redirect::to(INDEX_PAGE).temporary()
}

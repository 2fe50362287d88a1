use actix_web::{web, HttpResponse, Responder};

const USAGE: &str = "\
GET  /auth          open in a browser to start GitHub device authorization
POST /auth/check    {\"deviceCode\": \"...\"}  poll for the access token
POST /auth/checkGhu {\"ghu\": \"ghu_...\"}     look up the Copilot subscription SKU
";

async fn index() -> impl Responder {
    HttpResponse::Ok().body(USAGE)
}

async fn health_check() -> impl Responder {
    HttpResponse::Ok().body("OK")
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(index)))
        .service(web::resource("/health").route(web::get().to(health_check)));
}

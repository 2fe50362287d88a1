use actix_web::{get, post, web, HttpResponse};
use askama::Template;
use log::{error, info};

use github_client::error::GithubClientError;
use github_client::models::{SubscriptionStatus, TokenPoll};

use crate::dto::{CheckGhuRequest, CheckTokenRequest, Envelope};
use crate::error::AppError;
use crate::server::AppState;

const AUTH_PAGE_TITLE: &str = "Get Copilot Token";

const MSG_DEVICE_CODE_NULL: &str = "device code null";
const MSG_TOKEN_NULL: &str = "token null";
const MSG_GHU_NULL: &str = "ghu null";
const MSG_GHU_MALFORMED: &str = "ghu 格式错误";

const SKU_NOT_SUBSCRIBED: &str = "未订阅";
const QUERY_FAILED: &str = "查询失败";

// GitHub user tokens carry a gh* prefix (ghu_, gho_, ...).
const GHU_PREFIX: &str = "gh";

#[derive(Template)]
#[template(path = "auth.html")]
struct AuthPage<'a> {
    title: &'a str,
    user_code: &'a str,
    device_code: &'a str,
}

/// Request a device code from GitHub and render the user-code entry page.
#[get("/auth")]
pub async fn begin_device_authorization(
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    match app_state.github_client.request_device_authorization().await {
        Ok(authorization) => {
            info!("rendering auth page for user code {}", authorization.user_code);
            let page = AuthPage {
                title: AUTH_PAGE_TITLE,
                user_code: &authorization.user_code,
                device_code: &authorization.device_code,
            };
            let html = page.render()?;
            Ok(HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(html))
        }
        // GitHub reported an OAuth error: forward its body unmodified.
        Err(GithubClientError::Provider(body)) => Ok(HttpResponse::BadRequest().json(body)),
        Err(e) => {
            error!("device authorization request failed: {e}");
            Ok(HttpResponse::BadRequest().json(e.to_string()))
        }
    }
}

/// Perform one poll against the access-token endpoint. While the user has
/// not finished entering the code, the poll answers `code:1, token null`
/// with HTTP 200; the caller is expected to poll again.
#[post("/auth/check")]
pub async fn check_device_authorization(
    app_state: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let payload = serde_json::from_slice::<CheckTokenRequest>(&body).unwrap_or_default();
    let device_code = match payload.device_code.as_deref() {
        Some(code) if !code.is_empty() => code.to_string(),
        _ => {
            return Ok(HttpResponse::BadRequest().json(Envelope::failure(MSG_DEVICE_CODE_NULL)))
        }
    };

    match app_state.github_client.poll_access_token(&device_code).await {
        Ok(TokenPoll::Granted(token)) => Ok(HttpResponse::Ok().json(Envelope::success(token))),
        Ok(TokenPoll::Pending) => Ok(HttpResponse::Ok().json(Envelope::failure(MSG_TOKEN_NULL))),
        Err(e) => {
            error!("access token poll failed: {e}");
            Ok(HttpResponse::BadRequest().json(Envelope::failure(e.to_string())))
        }
    }
}

/// Query the Copilot token endpoint for the subscription SKU tied to a
/// `ghu` token. Downstream failures are reported through `data` with
/// `code:0`; that is the wire contract existing callers depend on.
#[post("/auth/checkGhu")]
pub async fn check_subscription(
    app_state: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let payload = serde_json::from_slice::<CheckGhuRequest>(&body).unwrap_or_default();
    let ghu = match payload.ghu.as_deref() {
        Some(token) if !token.is_empty() => token.to_string(),
        _ => return Ok(HttpResponse::BadRequest().json(Envelope::failure(MSG_GHU_NULL))),
    };
    if !ghu.starts_with(GHU_PREFIX) {
        return Ok(HttpResponse::BadRequest().json(Envelope::failure(MSG_GHU_MALFORMED)));
    }

    match app_state.github_client.check_subscription(&ghu).await {
        Ok(SubscriptionStatus::Subscribed { sku }) => {
            Ok(HttpResponse::Ok().json(Envelope::success(sku)))
        }
        Ok(SubscriptionStatus::NotSubscribed) => {
            Ok(HttpResponse::Ok().json(Envelope::success(SKU_NOT_SUBSCRIBED)))
        }
        Ok(SubscriptionStatus::Unavailable { status }) => {
            Ok(HttpResponse::Ok().json(Envelope::success(format!("{QUERY_FAILED} {status}"))))
        }
        Err(e) => {
            error!("subscription lookup failed: {e}");
            Ok(HttpResponse::Ok().json(Envelope::success(QUERY_FAILED)))
        }
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(begin_device_authorization)
        .service(check_device_authorization)
        .service(check_subscription);
}

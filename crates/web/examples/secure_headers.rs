use bytes::Bytes;
use http::{Method, Request, Response, StatusCode};
use micro_helmet::{CspDirectives, HstsValue, Policy, SecureHeaders, SecurityHeader};
use micro_helmet_web::decorator::Decorator;
use micro_helmet_web::{handler_fn, BoxError, RequestHandler, ResponseBody, SecureHeadersDecorator};
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

async fn ping(req: Request<Bytes>) -> Result<Response<ResponseBody>, BoxError> {
    let status = if req.method() == Method::GET { StatusCode::OK } else { StatusCode::METHOD_NOT_ALLOWED };
    let resp = Response::builder().status(status).header("x-powered-by", "micro-web").body(ResponseBody::from("PING"))?;
    Ok(resp)
}

#[tokio::main]
async fn main() {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::TRACE).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let mut policy = Policy::default();
    policy.x_frame_options = "SAME-ORIGIN".into();
    policy.strict_transport_security.insert("preload", HstsValue::Flag(true));
    policy.content_security_policy = CspDirectives::new()
        .source("default-src", ["'self'"])
        .source("img-src", ["'self'", "https://images.example.com"])
        .source("upgrade-insecure-requests", Vec::<String>::new());

    let secure_headers = SecureHeaders::builder().policy(policy).disable(SecurityHeader::XXssProtection).build();
    let handler = SecureHeadersDecorator::with_apply(secure_headers).decorate(handler_fn(ping));

    let req = Request::get("/ping").body(Bytes::new()).expect("valid request");
    match handler.invoke(req).await {
        Ok(resp) => {
            info!(status = %resp.status(), "response ready");
            for (name, value) in resp.headers() {
                info!("{}: {}", name, value.to_str().unwrap_or("<opaque>"));
            }
        }
        Err(e) => error!(cause = %e, "request failed"),
    }
}

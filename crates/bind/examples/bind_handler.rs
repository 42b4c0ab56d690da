use bytes::Bytes;
use http::{Request, Response};
use http_body_util::{BodyExt, Full};
use micro_bind::{Bind, BindHandler, Bound, Handler, make_handler};
use std::convert::Infallible;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Bind, Default, Clone, Debug)]
struct ListOrders {
    #[bind("in=header,label=x-user-email")]
    email: String,
    status: String,
    #[bind("-")]
    cursor: String,
}

async fn list_orders(req: Request<()>) -> Result<Response<Full<Bytes>>, Infallible> {
    let Some(params) = Bound::<ListOrders>::get(&req) else {
        return Ok(Response::new(Full::from("no parameters bound")));
    };
    Ok(Response::new(Full::from(format!("{} orders of {} from {:?}\r\n", params.status, params.email, params.cursor))))
}

#[tokio::main]
async fn main() {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::TRACE).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let handler = BindHandler::<ListOrders, _>::new(make_handler(list_orders)).expect("ListOrders is a record");

    let requests = [
        Request::builder().uri("/orders?status=open").header("X-User-Email", "a@b.com").body(()),
        Request::builder().uri("/orders?status=open").body(()),
    ];

    for request in requests {
        let request = request.expect("request should be valid");
        let uri = request.uri().clone();

        let response = match handler.call(request).await {
            Ok(response) => response,
            Err(e) => match e {},
        };
        let status = response.status();
        let body = response.into_body().collect().await.map(|body| body.to_bytes()).unwrap_or_default();
        info!(%uri, %status, body = ?body, "handled request");
    }
}

#![doc(hidden)]

use anyhow::Error;
use cache_expiry::{expiry::Expiry, resolver::resolve_expiry};
use futures::{
    channel::oneshot,
    future::{Either, select},
    pin_mut,
};
use http::{Request, Response, StatusCode};
use hyper::{body::Incoming, server::conn::http1, service::service_fn};
use hyper_util::{rt::TokioIo, server::graceful::GracefulShutdown};
use log::LevelFilter;
use reqwest::{Client, Url};
use simple_logger::SimpleLogger;
use std::{
    convert::Infallible,
    net::{Ipv4Addr, SocketAddr, SocketAddrV4},
};
use tokio::net::TcpListener;

/// Request path and headers of response served for it.
pub type Route = (&'static str, &'static [(&'static str, &'static str)]);

// installs logger once per test binary, level may be raised with RUST_LOG
pub fn logger_init() {
    let _ = SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init();
}

// builds response for path, carrying headers configured in routes, or 404
// without any headers if path is not configured
fn respond(
    routes: &[Route],
    path: &str,
) -> Response<String> {
    let mut response = Response::builder();

    match routes.iter().find(|(route_path, _)| *route_path == path) {
        Some((_, headers)) => {
            for (name, value) in headers.iter() {
                response = response.header(*name, *value);
            }
        }
        None => {
            response = response.status(StatusCode::NOT_FOUND);
        }
    }

    response.body(String::new()).unwrap()
}

// serves routes over http1 on bind (localhost with os assigned port when
// None), reports the actual address through bind_ready_sender and returns
// after shutdown_receiver fires and all open connections are drained
pub async fn serve_headers(
    routes: &'static [Route],
    bind: Option<SocketAddr>,
    bind_ready_sender: Option<oneshot::Sender<SocketAddr>>,
    shutdown_receiver: oneshot::Receiver<()>,
) -> Result<(), Error> {
    let service = service_fn(move |request: Request<Incoming>| async move {
        log::info!("serving {}", request.uri());
        Ok::<_, Infallible>(respond(routes, request.uri().path()))
    });

    let bind = bind.unwrap_or(SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::LOCALHOST, 0)));
    let listener = TcpListener::bind(bind).await?;
    let bind = listener.local_addr()?;
    log::trace!("listening on {bind}");

    if let Some(bind_ready_sender) = bind_ready_sender {
        bind_ready_sender.send(bind).unwrap();
    }

    let graceful = GracefulShutdown::new();
    pin_mut!(shutdown_receiver);

    loop {
        let accept = listener.accept();
        pin_mut!(accept);

        let (stream, remote_address) = match select(accept, &mut shutdown_receiver).await {
            Either::Left((accepted, _)) => accepted?,
            Either::Right((shutdown, _)) => {
                shutdown.unwrap();
                break;
            }
        };
        log::trace!("connection from {remote_address}");

        let connection = graceful.watch(
            http1::Builder::new().serve_connection(TokioIo::new(stream), service),
        );
        tokio::spawn(async move {
            connection.await.unwrap();
        });
    }

    log::trace!("shutting down");
    graceful.shutdown().await;

    Ok(())
}

// performs GET request on url and resolves expiry from response headers
pub async fn fetch_expiry(
    client: &Client,
    url: Url,
) -> Result<Expiry, Error> {
    log::trace!("downloading {url}");

    let response = client.get(url).send().await?.error_for_status()?;
    let expiry = resolve_expiry(response.headers());

    Ok(expiry)
}

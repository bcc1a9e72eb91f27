use std::time::Duration;

use poem::listener::{Acceptor, Listener, TcpListener};
use poem::{Route, Server};

use crate::client::{LookupClient, build_http_client};

/// Serves `app` on an ephemeral local port and returns its base URL.
pub async fn serve(app: Route) -> String {
    let acceptor = TcpListener::bind("127.0.0.1:0")
        .into_acceptor()
        .await
        .unwrap();
    let addr = *acceptor.local_addr()[0].as_socket_addr().unwrap();
    tokio::spawn(Server::new_with_acceptor(acceptor).run(app));
    format!("http://{}", addr)
}

/// Client bound to a stub server started with [`serve`].
pub async fn stub_client(app: Route) -> LookupClient {
    let base_url = serve(app).await;
    LookupClient::new(
        build_http_client(Duration::from_secs(5)).unwrap(),
        base_url,
    )
}

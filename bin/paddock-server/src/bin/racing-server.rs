use paddock_server::config::Service;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    paddock_server::run(Service::Racing).await
}

use yomikata_proxy::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let subscriber = get_subscriber("yomikata-proxy".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    yomikata_proxy::run().await
}

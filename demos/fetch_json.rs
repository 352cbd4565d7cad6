use gosub_net::{HttpRequester, RequesterExt};
use url::Url;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let arg = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "https://httpbin.org/json".to_string());
    let url = Url::parse(&arg)?;

    let requester = HttpRequester::new();

    // The requester does not care about the shape of the payload, so decode into a generic value
    let resp = requester.request_json::<serde_json::Value>(&url).await?;

    if let Some(meta) = resp.metadata() {
        println!("{} {} ({})", meta.status, meta.status_text, meta.url);
        for (name, value) in meta.headers.iter() {
            println!("{}: {}", name, value.to_str().unwrap_or("<binary>"));
        }
        println!();
    }

    println!("{}", serde_json::to_string_pretty(resp.value())?);

    Ok(())
}

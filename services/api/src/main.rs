use fundmatch_api::run;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("fundmatch error: {err}");
        std::process::exit(1);
    }
}

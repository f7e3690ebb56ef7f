use dotenv::dotenv;
use greenmap::configuration::get_configuration;
use greenmap::startup::Application;
use greenmap::telemetry::init_subscriber;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_subscriber("info")?;

    let configuration = get_configuration()?;
    let application = Application::build(configuration).await?;
    application.run_until_stopped().await?;
    Ok(())
}

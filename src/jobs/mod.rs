use crate::config::Config;

mod poll;

pub async fn run(config: Config) {
    poll::run_poll_loop(config).await;
}

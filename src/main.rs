use alb_path_metrics::error::AppResult;

fn main() -> AppResult<()> {
    alb_path_metrics::entry::run()
}

use eb_config::app::AppConfigMode;

pub fn logger_format(app_mode: &AppConfigMode) -> &'static str {
    match app_mode {
        AppConfigMode::Development => "%r %s %Dms %a %{User-Agent}i",
        AppConfigMode::Production => "%r %s %Dms",
    }
}

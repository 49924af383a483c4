use super::*;

#[test]
fn parse_args_defaults() -> AppResult<()> {
    let args = parse_test_args(["latprobe"])?;

    let expected_no_color = std::env::var_os("NO_COLOR")
        .map(|value| FalseyValueParser::new().parse_ref(&ProbeArgs::command(), None, &value))
        .transpose()?
        .unwrap_or(false);

    let checks = [
        (args.url.as_str() == DEFAULT_URL, "Unexpected url"),
        (args.runs.get() == 20, "Unexpected runs"),
        (
            args.request_timeout == Duration::from_secs(5),
            "Unexpected request_timeout",
        ),
        (
            args.connect_timeout == Duration::from_secs(5),
            "Unexpected connect_timeout",
        ),
        (args.delay == Duration::from_millis(300), "Unexpected delay"),
        (
            args.expected_status_code == 200,
            "Unexpected expected_status_code",
        ),
        (!args.no_ua, "Expected no_ua to be false"),
        (!args.verbose, "Expected verbose to be false"),
        (args.no_color == expected_no_color, "Unexpected no_color"),
        (args.config.is_none(), "Expected config to be None"),
    ];

    for (ok, message) in checks {
        if !ok {
            return Err(AppError::validation(message));
        }
    }
    Ok(())
}

#[test]
fn default_user_agent_carries_version() -> AppResult<()> {
    if !DEFAULT_USER_AGENT.starts_with("latprobe/") {
        return Err(AppError::validation("Unexpected user agent prefix"));
    }
    if !DEFAULT_USER_AGENT.ends_with(env!("CARGO_PKG_VERSION")) {
        return Err(AppError::validation("Expected crate version in user agent"));
    }
    Ok(())
}

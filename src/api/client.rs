use lazy_static::lazy_static;

lazy_static! {
    // Non-2xx responses are read like any other: the server reports
    // failures as JSON bodies ({"error": ...}) on 4xx/5xx statuses.
    pub static ref UREQ_AGENT: ureq::Agent = {
        let config = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build();
        config.into()
    };
}

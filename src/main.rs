use actix_web_helmet::{HeaderPolicy, HelmetConfig, HelmetConfigBuilder};

fn print_headers(policy: &HeaderPolicy, secure: bool) {
    for (name, value) in policy.header_pairs(secure) {
        println!("  {}: {}", name, value.to_str().unwrap_or("<opaque>"));
    }
}

fn main() {
    println!("Actix Web Helmet Middleware Example");

    let config = match std::env::args().nth(1) {
        Some(path) => match std::fs::read_to_string(&path)
            .map_err(|err| err.to_string())
            .and_then(|json| HelmetConfig::from_json(&json).map_err(|err| err.to_string()))
        {
            Ok(config) => config,
            Err(err) => {
                eprintln!("Could not load {path}: {err}");
                std::process::exit(1);
            }
        },
        None => HelmetConfigBuilder::new()
            .content_security_policy("default-src 'self'")
            .hsts_max_age(31536000)
            .hsts_preload_enabled(true)
            .build(),
    };

    let policy = HeaderPolicy::from_config(&config);

    println!("Plain HTTP response headers:");
    print_headers(&policy, false);
    println!("HTTPS response headers:");
    print_headers(&policy, true);
    println!("Wrap an App with: App::new().wrap(actix_web_helmet::helmet_with(config))");
}

use anyhow::Result;
use cookiewire::{Cookie, SameSite, SetCookieEncoder, parse_cookie_header, parse_set_cookie};

fn main() -> Result<()> {
    // Build a cookie the way a request handler would.
    let cookie = Cookie::new("session", "opaque-token")
        .set_max_age(3600)
        .set_same_site(SameSite::Lax)
        .set_path("/")
        .set_domain("example.com")
        .set_secure(true)
        .set_http_only(true);

    let header = SetCookieEncoder::STRICT.encode(&cookie)?;
    println!("Set-Cookie: {header}");

    // A browser would send it back as a bare name=value pair.
    let request = parse_cookie_header("session=opaque-token; theme=dark")?;
    for cookie in &request {
        println!("request cookie: {}={}", cookie.name(), cookie.value());
    }

    // Decode our own header and dump the structured cookie as JSON.
    let decoded = parse_set_cookie(&header)?;
    println!("decoded: {}", serde_json::to_string_pretty(&decoded)?);

    // Lax mode relays legacy cookies that strict mode refuses.
    let legacy = Cookie::new("legacy pref", "on");
    if let Err(error) = SetCookieEncoder::STRICT.encode(&legacy) {
        println!("strict refused: {error}");
    }
    println!("lax relayed: {}", SetCookieEncoder::LAX.encode(&legacy)?);

    Ok(())
}

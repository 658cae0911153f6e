use shared::error::CommonError;

/// Print the gateway's OpenAPI spec to stdout
pub fn cmd_openapi() -> Result<(), CommonError> {
    let spec = plumier_api_server::router::generate_openapi_spec();
    println!("{}", spec.to_pretty_json()?);
    Ok(())
}

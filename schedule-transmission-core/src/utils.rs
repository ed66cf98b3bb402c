/// Converts a `CamelCase` variant name into the `snake_case` stem used for
/// accessor names. Runs of capitals are kept together, so `HTTPHook`
/// becomes `http_hook`.
pub(crate) fn snake_case(ident: &syn::Ident) -> String {
    let name = ident.to_string();
    let name = name.strip_prefix("r#").unwrap_or(&name);
    let chars: Vec<char> = name.chars().collect();

    let mut out = String::with_capacity(name.len() + 4);
    for (i, c) in chars.iter().enumerate() {
        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower)
            {
                out.push('_');
            }
        }
        out.extend(c.to_lowercase());
    }
    out
}

/// Builds an identifier, reporting keywords and other invalid names
/// instead of panicking the way `Ident::new` would.
pub(crate) fn ident(name: &str, origin: &syn::Ident) -> darling::Result<syn::Ident> {
    match syn::parse_str::<syn::Ident>(name) {
        Ok(mut ident) => {
            ident.set_span(origin.span());
            Ok(ident)
        }
        Err(_) => Err(darling::Error::custom(format!(
            "`{name}` is not a valid method name, rename it with #[accessors(name = \"...\")]"
        ))
        .with_span(origin)),
    }
}

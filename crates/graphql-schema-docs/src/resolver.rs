use crate::TypeDefinition;

/// Computes the URL that a reference to a named type links to.
///
/// Implemented for every `Fn(&TypeDefinition) -> String`, so a closure is
/// usually all a caller needs:
///
/// ```
/// # use graphql_schema_docs::{TypeDefinition, UrlResolver, ScalarType};
/// let resolver = |ty: &TypeDefinition| format!("{}.doc.html", ty.name().to_lowercase());
///
/// assert_eq!(resolver.url_for(&ScalarType::new("DateTime").into()), "datetime.doc.html");
/// ```
pub trait UrlResolver {
    fn url_for(&self, definition: &TypeDefinition) -> String;
}

impl<F> UrlResolver for F
where
    F: Fn(&TypeDefinition) -> String,
{
    fn url_for(&self, definition: &TypeDefinition) -> String {
        self(definition)
    }
}

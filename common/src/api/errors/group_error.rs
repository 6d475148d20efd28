/// Errors resolving a resource group from a request.
#[derive(Debug)]
pub enum GroupError {
    NotFound(String),
}

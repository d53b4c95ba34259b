#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    Bool,
    I64,
    List(Box<Type>),
    Record,
    String,
}

mod column;
pub use column::Column;

mod expand;
pub use expand::Expand;

mod expr;
pub use expr::Expr;

mod expr_and;
pub use expr_and::ExprAnd;

mod expr_binary_op;
pub use expr_binary_op::ExprBinaryOp;

mod expr_field;
pub use expr_field::ExprField;

mod expr_in_list;
pub use expr_in_list::ExprInList;

mod expr_or;
pub use expr_or::ExprOr;

mod filter;
pub use filter::Filter;

mod op_binary;
pub use op_binary::BinaryOp;

mod returning;
pub use returning::Returning;

mod select;
pub use select::Select;

mod ty;
pub use ty::Type;

mod value;
pub use value::Value;

mod value_record;
pub use value_record::ValueRecord;

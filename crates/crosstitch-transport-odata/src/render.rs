//! Renders a read statement as OData query options.

use crosstitch_core::{
    stmt::{BinaryOp, Column, Expr, Select, Value},
    Error, Result,
};

use std::fmt::Write;

/// `$select` from the plain columns, `$filter` from the expression tree.
/// Expansion directives never reach the transport; the rewriter strips
/// cross-system ones and the local store serves the rest.
pub(crate) fn query_pairs(stmt: &Select) -> Result<Vec<(String, String)>> {
    let mut pairs = Vec::new();

    if let Some(columns) = stmt.returning.as_columns() {
        let select = columns
            .iter()
            .filter_map(Column::as_field)
            .collect::<Vec<_>>()
            .join(",");
        pairs.push(("$select".to_string(), select));
    }

    if let Some(expr) = stmt.filter.expr() {
        let mut filter = String::new();
        render_expr(&mut filter, expr)?;
        pairs.push(("$filter".to_string(), filter));
    }

    Ok(pairs)
}

fn render_expr(dst: &mut String, expr: &Expr) -> Result<()> {
    match expr {
        Expr::Field(field) => {
            dst.push_str(&field.name);
            Ok(())
        }
        Expr::Value(value) => render_value(dst, value),
        Expr::BinaryOp(binary_op) => {
            render_expr(dst, &binary_op.lhs)?;
            dst.push(' ');
            dst.push_str(op_keyword(binary_op.op));
            dst.push(' ');
            render_expr(dst, &binary_op.rhs)
        }
        Expr::And(and) => render_operands(dst, and, " and "),
        Expr::Or(or) => render_operands(dst, or, " or "),
        Expr::InList(in_list) => {
            // An `in` list renders as a parenthesized `or` chain; the v2
            // sandbox does not accept the v4 `in` operator.
            if in_list.list.is_empty() {
                return Err(Error::invalid_query("cannot render an empty `in` list"));
            }
            dst.push('(');
            for (index, item) in in_list.list.iter().enumerate() {
                if index > 0 {
                    dst.push_str(" or ");
                }
                render_expr(dst, &in_list.expr)?;
                dst.push_str(" eq ");
                render_expr(dst, item)?;
            }
            dst.push(')');
            Ok(())
        }
    }
}

fn render_operands<'a>(
    dst: &mut String,
    operands: impl IntoIterator<Item = &'a Expr>,
    separator: &str,
) -> Result<()> {
    dst.push('(');
    for (index, operand) in operands.into_iter().enumerate() {
        if index > 0 {
            dst.push_str(separator);
        }
        render_expr(dst, operand)?;
    }
    dst.push(')');
    Ok(())
}

fn render_value(dst: &mut String, value: &Value) -> Result<()> {
    match value {
        Value::Bool(v) => {
            dst.push_str(if *v { "true" } else { "false" });
            Ok(())
        }
        Value::I64(v) => {
            write!(dst, "{v}").unwrap();
            Ok(())
        }
        Value::Null => {
            dst.push_str("null");
            Ok(())
        }
        // String literals quote with `'`; embedded quotes double.
        Value::String(v) => {
            dst.push('\'');
            dst.push_str(&v.replace('\'', "''"));
            dst.push('\'');
            Ok(())
        }
        Value::List(_) | Value::Record(_) => Err(Error::invalid_query(format!(
            "cannot render value as an OData literal; value={value:?}"
        ))),
    }
}

fn op_keyword(op: BinaryOp) -> &'static str {
    match op {
        BinaryOp::Eq => "eq",
        BinaryOp::Ne => "ne",
        BinaryOp::Ge => "ge",
        BinaryOp::Gt => "gt",
        BinaryOp::Le => "le",
        BinaryOp::Lt => "lt",
    }
}

//! Transformers active during `TransformationStage::Converting`.

mod member_expression;
pub use member_expression::MemberExpressionTransformer;

mod template_literal;
pub use template_literal::TemplateLiteralTransformer;

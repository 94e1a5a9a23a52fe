pub mod nodes;

pub use nodes::{
    BinaryExpression, ChainIter, ChainLink, Expression, NodeType, Program, Statement,
    VariableDeclaration,
};

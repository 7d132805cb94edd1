//! 物品：模型、表单、服务、处理器与页面

pub mod form;
pub mod handler;
pub mod model;
pub mod service;
pub mod view;

pub mod employee_render;

pub use employee_render::{render_all, render_employee, render_money, SEPARATOR};

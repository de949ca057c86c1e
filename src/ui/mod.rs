pub mod appearance;
pub mod dashboard_loop;
pub mod dialog;
pub mod gradient;
pub mod layout;
pub mod panels;
pub mod renderer;
pub mod spinner;
pub mod theme;

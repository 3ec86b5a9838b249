mod gradient_descent;
mod normal_equation;
mod solver;

pub use gradient_descent::GradientDescent;
pub use normal_equation::NormalEquation;
pub use solver::Solver;

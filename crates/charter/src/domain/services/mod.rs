pub mod tick_math;

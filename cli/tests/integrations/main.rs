mod check;
mod list;
mod new;
mod run;
mod surface;

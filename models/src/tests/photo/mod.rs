mod builder;
mod validation;

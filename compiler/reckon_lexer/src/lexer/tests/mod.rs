mod classify;
mod sanitize;

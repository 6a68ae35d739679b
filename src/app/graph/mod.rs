pub mod interaction;
mod view;

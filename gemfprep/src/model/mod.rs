pub mod para;

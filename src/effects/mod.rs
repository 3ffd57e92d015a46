pub mod dynamics;

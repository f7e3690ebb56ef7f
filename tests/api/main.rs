mod helpers;
mod plants;

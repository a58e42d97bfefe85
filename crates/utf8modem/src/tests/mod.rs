
mod property_decode;

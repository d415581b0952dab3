fn main() {
    // Only the ESP-IDF binary needs the IDF sysenv; host builds of the
    // library and its tests skip it.
    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}

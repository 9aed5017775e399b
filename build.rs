fn main() {
    println!("cargo:rerun-if-env-changed=SERVOARM_CONFIG");

    // ESP-IDF link arguments are only needed for the firmware image;
    // host test builds run without the espidf feature.
    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}

fn main() {
    nexus_web::run();
}

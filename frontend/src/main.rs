fn main() {
    moskal_auth_frontend::run();
}

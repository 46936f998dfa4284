fn main() {
    hello_counter::run();
}

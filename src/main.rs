fn main() {
    pizza_store_api::main();
}

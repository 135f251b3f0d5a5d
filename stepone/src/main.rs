fn main() {
    stepone_lib::run()
}

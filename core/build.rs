fn main() {
    uniffi::generate_scaffolding("src/divecalc.udl").unwrap();
}

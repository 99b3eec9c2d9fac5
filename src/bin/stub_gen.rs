fn main() -> pyo3_stub_gen::Result<()> {
    let stub = faregraph::stub_info()?;
    stub.generate()?;
    Ok(())
}

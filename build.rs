#[cfg(target_os = "windows")]
fn main() {
    use winresource::WindowsResource;

    // icon is optional
    if !std::path::Path::new("res/rdailystatus.ico").exists() {
        return;
    }

    let mut res = WindowsResource::new();
    res.set_icon("res/rdailystatus.ico")
        .set("FileDescription", "rDailyStatus CLI")
        .set("ProductName", "rDailyStatus")
        .set("OriginalFilename", "rdailystatus.exe")
        .set("FileVersion", env!("CARGO_PKG_VERSION"))
        .set("ProductVersion", env!("CARGO_PKG_VERSION"))
        .compile()
        .expect("Failed to embed icon resource");
}

#[cfg(not(target_os = "windows"))]
fn main() {}

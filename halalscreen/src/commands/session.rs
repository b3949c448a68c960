// halalscreen/src/commands/session.rs
//
// USE CASE: Local sign-in / sign-out.

use std::path::Path;

use super::ProjectContext;

pub fn login(project_dir: &Path, email: &str, name: &str) -> anyhow::Result<()> {
    let store = ProjectContext::load(project_dir)?.session_store()?;
    let session = store.sign_in(email, name)?;
    let user = session.require_user()?;
    println!("🔑 Signed in as {} <{}>", user.name, user.email);
    Ok(())
}

pub fn logout(project_dir: &Path) -> anyhow::Result<()> {
    let store = ProjectContext::load(project_dir)?.session_store()?;
    store.sign_out()?;
    println!("🚪 Signed out.");
    Ok(())
}

pub fn whoami(project_dir: &Path) -> anyhow::Result<()> {
    let store = ProjectContext::load(project_dir)?.session_store()?;
    match store.load()?.user {
        Some(user) => println!(
            "👤 {} <{}> (since {})",
            user.name,
            user.email,
            user.created_at.format("%Y-%m-%d %H:%M UTC")
        ),
        None => println!("👤 Not signed in."),
    }
    Ok(())
}

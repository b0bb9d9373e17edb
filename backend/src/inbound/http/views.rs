//! Server-rendered HTML views.
//!
//! Each page is a small view struct implementing [`fmt::Display`]; handlers
//! render them into response bodies. Every value that originates from a user
//! passes through [`Escaped`] before it reaches the markup.

use std::fmt::{self, Display, Formatter, Write as _};

use crate::domain::User;

const BASE_STYLE: &str = "\
body { font-family: Arial, sans-serif; margin: 40px; background-color: #f5f5f5; }
.container { margin: 0 auto; background: white; padding: 30px; border-radius: 10px; box-shadow: 0 0 10px rgba(0,0,0,0.1); }
h1 { color: #333; text-align: center; }
.back-link { display: inline-block; margin-bottom: 20px; color: #007bff; text-decoration: none; }
.back-link:hover { text-decoration: underline; }";

const LANDING_STYLE: &str = "\
.container { max-width: 800px; }
.nav { margin: 20px 0; }
.nav a { display: inline-block; margin: 10px; padding: 10px 20px; background: #007bff; color: white; text-decoration: none; border-radius: 5px; }
.nav a:hover { background: #0056b3; }";

const FORM_STYLE: &str = "\
.container { max-width: 600px; }
.form-group { margin: 15px 0; }
label { display: block; margin-bottom: 5px; font-weight: bold; }
input { width: 100%; padding: 10px; border: 1px solid #ddd; border-radius: 5px; box-sizing: border-box; }
button { background: #28a745; color: white; padding: 12px 30px; border: none; border-radius: 5px; cursor: pointer; font-size: 16px; }
button:hover { background: #218838; }";

const USERS_STYLE: &str = "\
.container { max-width: 1000px; }
table { width: 100%; border-collapse: collapse; margin: 20px 0; }
th, td { padding: 12px; text-align: left; border-bottom: 1px solid #ddd; }
th { background-color: #f8f9fa; font-weight: bold; }
tr:hover { background-color: #f5f5f5; }
.edit-btn { background: #ffc107; color: black; border: none; padding: 5px 10px; border-radius: 3px; cursor: pointer; margin-right: 5px; }
.delete-btn { background: #dc3545; color: white; border: none; padding: 5px 10px; border-radius: 3px; cursor: pointer; }
.add-btn { background: #28a745; color: white; padding: 10px 20px; border-radius: 5px; text-decoration: none; display: inline-block; margin: 0 10px 20px 0; }
.json-btn { background: #17a2b8; }";

const ADD_FORM_SCRIPT: &str = r#"
document.getElementById('userForm').onsubmit = async function (e) {
    e.preventDefault();
    const userData = Object.fromEntries(new FormData(e.target));
    userData.birth_year = parseInt(userData.birth_year, 10);
    try {
        const response = await fetch('/user/add', {
            method: 'POST',
            headers: { 'Content-Type': 'application/json' },
            body: JSON.stringify(userData)
        });
        if (response.ok) {
            alert('User added successfully!');
            window.location.href = '/user/get-all';
        } else {
            const error = await response.json();
            alert('Error: ' + error.message);
        }
    } catch (error) {
        alert('Network error: ' + error.message);
    }
};
"#;

const USERS_SCRIPT: &str = r#"
async function deleteUser(login) {
    if (!confirm(`Delete user ${login}?`)) {
        return;
    }
    try {
        const response = await fetch(`/user/delete/${encodeURIComponent(login)}`, { method: 'DELETE' });
        if (response.ok) {
            location.reload();
        } else {
            const error = await response.json();
            alert('Error: ' + error.message);
        }
    } catch (error) {
        alert('Network error: ' + error.message);
    }
}

async function editUser(login) {
    const name = prompt('New name (leave empty to keep):');
    const surname = prompt('New surname (leave empty to keep):');
    const birthYear = prompt('New birth year (leave empty to keep):');
    const update = {};
    if (name && name.trim()) update.name = name.trim();
    if (surname && surname.trim()) update.surname = surname.trim();
    if (birthYear && birthYear.trim()) update.birth_year = parseInt(birthYear.trim(), 10);
    if (Object.keys(update).length === 0) {
        alert('Nothing changed');
        return;
    }
    try {
        const response = await fetch(`/user/edit/${encodeURIComponent(login)}`, {
            method: 'PUT',
            headers: { 'Content-Type': 'application/json' },
            body: JSON.stringify(update)
        });
        if (response.ok) {
            location.reload();
        } else {
            const error = await response.json();
            alert('Error: ' + error.message);
        }
    } catch (error) {
        alert('Network error: ' + error.message);
    }
}

document.querySelectorAll('[data-action]').forEach(function (button) {
    button.addEventListener('click', function () {
        const login = button.dataset.login;
        if (button.dataset.action === 'edit') {
            editUser(login);
        } else {
            deleteUser(login);
        }
    });
});
"#;

/// HTML-escaped view of a string, safe for text content and quoted attributes.
///
/// # Examples
/// ```
/// use user_registry::inbound::http::views::Escaped;
///
/// assert_eq!(Escaped("<b>\"O'Neil\" & co</b>").to_string(),
///     "&lt;b&gt;&quot;O&#39;Neil&quot; &amp; co&lt;/b&gt;");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Escaped<'a>(pub &'a str);

impl Display for Escaped<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for ch in self.0.chars() {
            match ch {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '"' => f.write_str("&quot;")?,
                '\'' => f.write_str("&#39;")?,
                other => f.write_char(other)?,
            }
        }
        Ok(())
    }
}

/// Shared document chrome around every page body.
struct Layout<'a> {
    title: &'a str,
    style: &'a str,
    script: Option<&'a str>,
}

impl Layout<'_> {
    fn render(
        &self,
        f: &mut Formatter<'_>,
        body: impl FnOnce(&mut Formatter<'_>) -> fmt::Result,
    ) -> fmt::Result {
        writeln!(f, "<!DOCTYPE html>")?;
        writeln!(f, "<html>")?;
        writeln!(f, "<head>")?;
        writeln!(f, "<meta charset=\"utf-8\">")?;
        writeln!(f, "<title>{}</title>", Escaped(self.title))?;
        writeln!(f, "<style>\n{BASE_STYLE}\n{}\n</style>", self.style)?;
        writeln!(f, "</head>")?;
        writeln!(f, "<body>")?;
        writeln!(f, "<div class=\"container\">")?;
        body(f)?;
        writeln!(f, "</div>")?;
        if let Some(script) = self.script {
            writeln!(f, "<script>{script}</script>")?;
        }
        writeln!(f, "</body>")?;
        write!(f, "</html>")
    }
}

/// Landing page linking to the user list and the add form.
#[derive(Debug, Default, Clone, Copy)]
pub struct LandingPage;

impl Display for LandingPage {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Layout {
            title: "User registry",
            style: LANDING_STYLE,
            script: None,
        }
        .render(f, |f| {
            writeln!(f, "<h1>User registry</h1>")?;
            writeln!(f, "<div class=\"nav\">")?;
            writeln!(f, "<a href=\"/user/get-all\">All users</a>")?;
            writeln!(f, "<a href=\"/user/add-form\">Add user</a>")?;
            writeln!(f, "</div>")?;
            writeln!(
                f,
                "<p>Welcome to the user registry. Use the menu above to browse or add users.</p>"
            )
        })
    }
}

/// Form page posting a new user to `POST /user/add`.
#[derive(Debug, Default, Clone, Copy)]
pub struct AddUserForm;

impl AddUserForm {
    const FIELDS: [(&'static str, &'static str, &'static str); 4] = [
        ("login", "Login", "text"),
        ("name", "Name", "text"),
        ("surname", "Surname", "text"),
        ("birth_year", "Birth year", "number"),
    ];
}

impl Display for AddUserForm {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Layout {
            title: "Add user",
            style: FORM_STYLE,
            script: Some(ADD_FORM_SCRIPT),
        }
        .render(f, |f| {
            writeln!(f, "<a href=\"/\" class=\"back-link\">&larr; Back to home</a>")?;
            writeln!(f, "<h1>Add a new user</h1>")?;
            writeln!(f, "<form id=\"userForm\">")?;
            for (id, label, kind) in Self::FIELDS {
                writeln!(f, "<div class=\"form-group\">")?;
                writeln!(f, "<label for=\"{id}\">{label}:</label>")?;
                writeln!(f, "<input type=\"{kind}\" id=\"{id}\" name=\"{id}\" required>")?;
                writeln!(f, "</div>")?;
            }
            writeln!(f, "<button type=\"submit\">Add user</button>")?;
            writeln!(f, "</form>")
        })
    }
}

/// Table of every registered user, or an empty-state notice.
#[derive(Debug, Clone, Copy)]
pub struct UsersPage<'a> {
    users: &'a [User],
}

impl<'a> UsersPage<'a> {
    /// Render the given users in the order supplied.
    #[must_use]
    pub fn new(users: &'a [User]) -> Self {
        Self { users }
    }

    fn write_table(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "<table>")?;
        writeln!(f, "<thead><tr>")?;
        for heading in ["Login", "Name", "Surname", "Age", "Actions"] {
            write!(f, "<th>{heading}</th>")?;
        }
        writeln!(f, "</tr></thead>")?;
        writeln!(f, "<tbody>")?;
        for user in self.users {
            let login = Escaped(user.login().as_ref());
            writeln!(f, "<tr>")?;
            writeln!(f, "<td>{login}</td>")?;
            writeln!(f, "<td>{}</td>", Escaped(user.name()))?;
            writeln!(f, "<td>{}</td>", Escaped(user.surname()))?;
            writeln!(f, "<td>{}</td>", user.age())?;
            write!(f, "<td>")?;
            write!(
                f,
                r#"<button class="edit-btn" data-action="edit" data-login="{login}">Edit</button>"#
            )?;
            write!(f, r#"<button class="delete-btn" data-action="delete" "#)?;
            write!(f, r#"data-login="{login}">Delete</button>"#)?;
            writeln!(f, "</td>")?;
            writeln!(f, "</tr>")?;
        }
        writeln!(f, "</tbody>")?;
        writeln!(f, "</table>")
    }
}

impl Display for UsersPage<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Layout {
            title: "All users",
            style: USERS_STYLE,
            script: Some(USERS_SCRIPT),
        }
        .render(f, |f| {
            writeln!(f, "<a href=\"/\" class=\"back-link\">&larr; Back to home</a>")?;
            writeln!(f, "<h1>All users</h1>")?;
            writeln!(f, "<a href=\"/user/add-form\" class=\"add-btn\">Add user</a>")?;
            writeln!(
                f,
                "<a href=\"/user/get-all/json\" class=\"add-btn json-btn\">JSON data</a>"
            )?;
            if self.users.is_empty() {
                writeln!(f, "<p class=\"empty\">The user list is empty.</p>")
            } else {
                self.write_table(f)
            }
        })
    }
}

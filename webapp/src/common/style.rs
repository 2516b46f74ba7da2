use constcat::concat;

const BASE: &str = r#"
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

body {
  font-family: system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif;
  color: #222;
  background-color: #fafafa;
  line-height: 1.5;
}

a {
  color: #1565c0;
  text-decoration: none;
}

a:hover {
  text-decoration: underline;
}

.page-content {
  max-width: 1100px;
  margin: 0 auto;
  padding: 24px 16px;
}

.section-title {
  font-size: 1.5rem;
  font-weight: 600;
  margin-bottom: 16px;
}

.error-state {
  display: block;
  padding: 12px;
  color: #b71c1c;
}

.hidden {
  display: none;
}
"#;

const NAV: &str = r#"
.app-header {
  background-color: #fff;
  box-shadow: 0 1px 3px rgba(0, 0, 0, 0.15);
  position: sticky;
  top: 0;
  z-index: 10;
}

.nav-container {
  display: flex;
  max-width: 1100px;
  margin: 0 auto;
  align-items: center;
  justify-content: space-between;
  padding: 0 16px;
  height: 56px;
}

.logo {
  font-weight: 600;
  font-size: 1.2rem;
}

.nav-button {
  display: none;
  border: none;
  background: none;
  font-size: 1rem;
  padding: 8px 12px;
  cursor: pointer;
}

.nav-links {
  display: flex;
  gap: 12px;
}

.nav-link {
  color: #555;
  font-weight: 500;
  padding: 8px 12px;
  border-radius: 6px;
}

.nav-link:hover {
  color: #222;
  background-color: #eee;
  text-decoration: none;
}

.nav-link.current-nav-link {
  color: #1565c0;
  background-color: rgba(21, 101, 192, 0.1);
}

@media (max-width: 720px) {
  .nav-button {
    display: block;
  }

  .nav-links {
    display: none;
  }

  .app-header.menu-shown .nav-links {
    display: flex;
    flex-direction: column;
    position: absolute;
    top: 56px;
    left: 0;
    right: 0;
    background-color: #fff;
    padding: 8px 16px 16px;
  }

  .app-header.menu-shown .nav-link {
    opacity: 0;
    transition: opacity 0.2s ease-in;
  }

  .app-header.menu-shown .nav-link.menu-shown {
    opacity: 1;
  }
}
"#;

const HOME: &str = r#"
.hero {
  padding: 48px 16px;
  text-align: center;
  background-color: #e3f2fd;
}

.hero-title {
  font-size: 2.2rem;
  font-weight: 700;
}

.hero-subtitle {
  margin-top: 8px;
  color: #555;
}

.hero-actions {
  margin-top: 24px;
  display: flex;
  gap: 12px;
  justify-content: center;
}

.btn {
  display: inline-block;
  padding: 10px 20px;
  border: none;
  border-radius: 6px;
  font-size: 1rem;
  cursor: pointer;
}

.btn-primary {
  background-color: #1565c0;
  color: #fff;
}

.btn-secondary {
  background-color: #fff;
  color: #1565c0;
  border: 1px solid #1565c0;
}

.event-card-row {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
  gap: 16px;
}
"#;

const GALLERY: &str = r#"
.photo-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
  gap: 12px;
}

.photo-tile img {
  width: 100%;
  height: 220px;
  object-fit: cover;
  border-radius: 6px;
  display: block;
}

.load-more {
  display: block;
  margin: 24px auto 0;
  padding: 10px 24px;
  font-size: 1rem;
  border: none;
  border-radius: 6px;
  background-color: #1565c0;
  color: #fff;
  cursor: pointer;
}

.load-more:disabled {
  background-color: #bbb;
  cursor: default;
}
"#;

const CALENDAR: &str = r#"
.calendar-month {
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 12px;
  font-size: 1.3rem;
  font-weight: 600;
  margin-bottom: 12px;
}

.month-nav {
  border: none;
  background: none;
  font-size: 1.4rem;
  color: #1565c0;
  cursor: pointer;
  padding: 0 10px;
}

.calendar-grid {
  display: grid;
  grid-template-columns: repeat(7, 1fr);
  gap: 4px;
}

.calendar-weekday {
  text-align: center;
  font-weight: 600;
  padding: 6px 0;
  color: #555;
}

.calendar-tile {
  min-height: 72px;
  padding: 6px;
  background-color: #fff;
  border: 1px solid #ddd;
  border-radius: 4px;
  cursor: pointer;
}

.calendar-tile.out-of-month {
  background-color: #f0f0f0;
  color: #aaa;
  cursor: default;
}

.calendar-tile.calendar-today .tile-date {
  font-weight: 700;
  color: #1565c0;
}

.calendar-tile.focused-tile {
  border-color: #1565c0;
  box-shadow: 0 0 0 2px rgba(21, 101, 192, 0.3);
}

.tile-event-count {
  display: inline-block;
  margin-left: 6px;
  padding: 0 6px;
  border-radius: 8px;
  background-color: #1565c0;
  color: #fff;
  font-size: 0.8rem;
}

.event-detail {
  margin-top: 24px;
  display: grid;
  gap: 12px;
}

.event-card {
  background-color: #fff;
  border: 1px solid #ddd;
  border-radius: 6px;
  padding: 12px 16px;
}

.event-card.focused-event-card {
  border-color: #1565c0;
  box-shadow: 0 0 0 2px rgba(21, 101, 192, 0.3);
}

.event-when {
  color: #555;
  font-size: 0.95rem;
}

.event-venue {
  margin-top: 4px;
}

.event-description {
  margin-top: 8px;
}
"#;

const ADMIN: &str = r#"
.admin-form {
  display: grid;
  gap: 12px;
  max-width: 600px;
}

.admin-form fieldset {
  border: 1px solid #ddd;
  border-radius: 6px;
  padding: 12px;
  display: grid;
  gap: 8px;
}

.admin-form label {
  display: grid;
  gap: 4px;
}

.admin-form input[type=submit] {
  justify-self: start;
  padding: 8px 20px;
  border: none;
  border-radius: 6px;
  background-color: #1565c0;
  color: #fff;
  font-size: 1rem;
  cursor: pointer;
}

.admin-form input[type=submit]:disabled {
  background-color: #bbb;
}

.sort-list {
  list-style: none;
  display: grid;
  gap: 6px;
}

.sort-target {
  display: flex;
  align-items: center;
  gap: 8px;
  background-color: #fff;
  border: 1px solid #ddd;
  border-radius: 6px;
  padding: 8px 12px;
}

.sort-target .link-name {
  flex: 1;
}

.empty-notification {
  color: #777;
  padding: 8px 0;
}
"#;

pub const SITE_STYLES: &str = concat!(BASE, NAV, HOME, GALLERY, CALENDAR, ADMIN);

//! Static file contents written into the generated project.

use crate::variant::Variant;

const HOME_PAGE: &str = r"
import { Helmet } from '{helmet}';

const Home = () => {
    return (
        <div>
            <Helmet>
                <title>Home Page</title>
            </Helmet>
            <div>Home Page</div>
        </div>
    );
};

export default Home;
";

const INDEX_CSS: &str = r#"
@import url("https://fonts.googleapis.com/css2?{fonts}");
@tailwind base;
@tailwind components;
@tailwind utilities;

body {
  overscroll-behavior: none;
  margin: 0;
  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', 'Roboto', 'Oxygen',
    'Ubuntu', 'Cantarell', 'Fira Sans', 'Droid Sans', 'Helvetica Neue',
    sans-serif;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

code {
  font-family: source-code-pro, Menlo, Monaco, Consolas, 'Courier New',
    monospace;
}
"#;

/// `tailwind.config.js`, replacing what `tailwindcss init` generated.
pub const TAILWIND_CONFIG: &str = r##"
/** @type {import('tailwindcss').Config} */
module.exports = {
    content: ["./src/**/*.{js,jsx,ts,tsx}"],
    theme: {
        fontFamily: {
            poppins: ["Poppins"],
            montserrat: ["Montserrat"],
        },
        colors: {
            primary: {
                red: "#FF0000",
                green: "#00FF00",
                blue: "#0000FF",
            },
        },
    },
    plugins: [],
};
"##;

/// `src/App.js` with a single routed home page.
pub const APP_JS: &str = r#"
import React from 'react';
import { BrowserRouter as Router, Routes, Route } from 'react-router-dom';
import Home from './pages/Home';

function App() {
    return (
        <Router>
            <Routes>
                <Route path="/" element={<Home />} />
            </Routes>
        </Router>
    );
}

export default App;
"#;

/// `src/index.js` for the async variant: `react-helmet-async` needs a provider
/// above every `<Helmet>`.
pub const ENTRY_POINT: &str = r"
import React from 'react';
import ReactDOM from 'react-dom/client';
import { HelmetProvider } from 'react-helmet-async';
import './index.css';
import App from './App';

const root = ReactDOM.createRoot(document.getElementById('root'));
root.render(
    <React.StrictMode>
        <HelmetProvider>
            <App />
        </HelmetProvider>
    </React.StrictMode>
);
";

/// `src/pages/Home.jsx`, importing `Helmet` from the variant's package.
#[must_use]
pub fn home_page(variant: Variant) -> String {
    HOME_PAGE.replace("{helmet}", variant.metadata_package())
}

/// `src/index.css` with Tailwind directives and the variant's font import.
#[must_use]
pub fn index_css(variant: Variant) -> String {
    INDEX_CSS.replace("{fonts}", variant.font_query())
}

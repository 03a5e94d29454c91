//! Global CSS styles for the portfolio.
//!
//! Dark page, blood-red accents, Montserrat with system fallbacks.

pub const GLOBAL_STYLES: &str = r#"
/* === Fonts === */
@font-face {
  font-family: 'Bhank';
  font-weight: normal;
  font-style: normal;
  src: url('/fonts/Bhank.woff2') format('woff2'),
       url('/fonts/Bhank.woff') format('woff');
  font-display: swap;
}

/* === CSS Custom Properties === */
:root {
  /* Backgrounds */
  --page-black: #000000;
  --card-gray: #111827;
  --card-gray-translucent: rgba(17, 24, 39, 0.5);
  --track-gray: #374151;
  --border-gray: #374151;

  /* Accent */
  --accent: #8b0000;
  --accent-hover: #a50000;
  --accent-deep: #991b1b;
  --accent-tag: rgba(127, 29, 29, 0.5);

  /* Text */
  --text-primary: #ffffff;
  --text-secondary: #d1d5db;
  --text-muted: #9ca3af;
  --link-blue: #60a5fa;
  --link-blue-hover: #93c5fd;

  /* Typography */
  --font-sans: 'Montserrat', 'Helvetica Neue', Arial, sans-serif;

  /* Transitions */
  --transition-card: 300ms ease;
  --transition-caption: 500ms ease;

}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  height: 100%;
  background: var(--page-black);
  color: var(--text-primary);
  font-family: var(--font-sans);
  overflow: hidden;
}

a {
  color: inherit;
  text-decoration: none;
}

/* === Scrollbar === */
::-webkit-scrollbar {
  width: 10px;
}

::-webkit-scrollbar-track {
  background: #1a1a1a;
}

::-webkit-scrollbar-thumb {
  background: var(--accent);
  border-radius: 5px;
}

::-webkit-scrollbar-thumb:hover {
  background: var(--accent-hover);
}

/* === Page Container === */
.portfolio {
  position: relative;
  height: 100vh;
  overflow-y: auto;
  overflow-x: hidden;
  scroll-behavior: smooth;
}

.page-layer {
  position: relative;
  z-index: 10;
}

/* === Particle Background === */
.particle-scene {
  position: fixed;
  inset: 0;
  z-index: 0;
  perspective: 800px;
  pointer-events: none;
  overflow: hidden;
}

.particle-group {
  position: absolute;
  top: 50%;
  left: 50%;
  width: 0;
  height: 0;
  transform-style: preserve-3d;
}

.particle {
  position: absolute;
  width: 3px;
  height: 3px;
  margin: -1.5px 0 0 -1.5px;
  border-radius: 50%;
  background: currentColor;
}

.orbit-label {
  position: absolute;
  white-space: nowrap;
  font-size: 1.5rem;
  color: var(--accent);
  transform-origin: center;
}

/* === Navigation Header === */
.nav-header {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 50;
  padding: 1.5rem;
  display: flex;
  justify-content: space-between;
  align-items: center;
  background: rgba(0, 0, 0, 0.3);
  backdrop-filter: blur(16px);
}

.nav-title {
  font-size: 1.875rem;
  font-weight: 700;
}

.nav-links {
  list-style: none;
  display: flex;
  gap: 1.5rem;
}

.nav-link {
  font-size: 1.125rem;
  color: var(--text-primary);
  transition: color var(--transition-card);
}

.nav-link:hover,
.nav-link.active {
  color: var(--accent-deep);
}

/* === Sections === */
.page-section {
  min-height: 100vh;
  padding: 5rem 1.5rem;
}

.centered-section {
  display: flex;
  align-items: center;
}

.section-body {
  max-width: 56rem;
  margin: 0 auto;
}

.section-body.wide {
  width: 100%;
}

.section-title {
  font-size: 3rem;
  font-weight: 700;
  margin-bottom: 2rem;
}

.section-title.centered {
  text-align: center;
  margin-bottom: 3rem;
}

.card-title {
  font-size: 1.5rem;
  font-weight: 700;
  margin-bottom: 0.5rem;
}

.stack > * + * {
  margin-top: 3rem;
}

/* === Hero === */
.hero {
  height: 100vh;
  display: flex;
  flex-direction: column;
  justify-content: center;
  align-items: center;
}

.hero__content {
  text-align: center;
}

.hero__name {
  font-size: 4.5rem;
  font-weight: 700;
  margin-bottom: 1rem;
  opacity: 0;
  animation: hero-in 1s ease 0.5s forwards;
}

@keyframes hero-in {
  from { opacity: 0; transform: translateY(-50px); }
  to { opacity: 1; transform: translateY(0); }
}

.hero__details {
  margin-top: 2rem;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.hero__link {
  color: var(--link-blue);
}

.hero__link:hover {
  color: var(--link-blue-hover);
}

/* === Animated Subtitle === */
.subtitle-slot {
  min-height: 2.75rem;
  margin-top: 1rem;
}

.subtitle {
  font-size: 1.875rem;
  font-weight: 600;
  color: var(--text-secondary);
}

.subtitle--enter {
  animation: caption-enter var(--transition-caption) forwards;
}

.subtitle--exit {
  animation: caption-exit var(--transition-caption) forwards;
}

@keyframes caption-enter {
  from { opacity: 0; transform: translateY(20px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes caption-exit {
  from { opacity: 1; transform: translateY(0); }
  to { opacity: 0; transform: translateY(-20px); }
}

/* === About === */
.about-text {
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
  font-size: 1.125rem;
}

/* === Info Cards (education, experience) === */
.info-card {
  background: var(--card-gray);
  border-radius: 0.5rem;
  padding: 1.5rem;
  margin-bottom: 2rem;
  transition: transform var(--transition-card);
}

.info-card:hover {
  transform: scale(1.05);
}

.info-card__subtitle {
  font-size: 1.25rem;
  margin-bottom: 0.5rem;
}

.info-card__period {
  margin-bottom: 1rem;
}

.info-card__heading {
  font-size: 1.25rem;
  font-weight: 600;
  margin: 1rem 0 0.5rem;
}

.bullet-list {
  list-style: disc inside;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.bullet-grid {
  list-style: disc inside;
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: 0.5rem;
}

/* === Projects === */
.project-grid {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: 2rem;
  max-width: 56rem;
  margin: 0 auto;
}

.project-card {
  position: relative;
  overflow: hidden;
  border-radius: 0.5rem;
  box-shadow: 0 10px 15px rgba(0, 0, 0, 0.4);
  background: var(--card-gray-translucent);
  backdrop-filter: blur(4px);
  transition: transform var(--transition-card);
}

.project-card__image {
  display: block;
  width: 100%;
  height: 20rem;
  object-fit: cover;
  opacity: 0.7;
}

.project-card__overlay {
  position: absolute;
  inset: 0;
  display: flex;
  flex-direction: column;
  justify-content: center;
  align-items: center;
  padding: 1.5rem;
  text-align: center;
  background: rgba(17, 24, 39, 0.7);
  transition: opacity var(--transition-card);
}

.project-card__description {
  font-size: 0.875rem;
  margin-bottom: 1rem;
}

.project-card__links {
  display: flex;
  gap: 1rem;
}

/* === Image Fallback === */
.image-placeholder {
  display: flex;
  align-items: center;
  justify-content: center;
  background: repeating-linear-gradient(45deg, #1f2937, #1f2937 10px, #111827 10px, #111827 20px);
  color: var(--text-muted);
}

.image-placeholder__label {
  font-size: 0.875rem;
  padding: 0 1rem;
}

/* === Tags === */
.tag-pills {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 0.5rem;
  margin-bottom: 1rem;
}

.pill {
  background: var(--accent-tag);
  color: var(--text-primary);
  font-size: 0.75rem;
  padding: 0.25rem 0.5rem;
  border-radius: 0.25rem;
}

/* === Buttons === */
.btn-primary,
.btn-secondary {
  display: inline-block;
  border: none;
  color: var(--text-primary);
  padding: 0.5rem 1rem;
  border-radius: 0.25rem;
  font-family: var(--font-sans);
  cursor: pointer;
  transition: background var(--transition-card), opacity var(--transition-card);
}

.btn-primary {
  background: var(--accent-deep);
}

.btn-primary:hover {
  background: #b91c1c;
}

.btn-secondary {
  background: #1f2937;
}

.btn-secondary:hover {
  background: var(--track-gray);
}

.btn-block {
  width: 100%;
  padding: 0.75rem;
  border-radius: 0.5rem;
  font-size: 1.125rem;
  font-weight: 600;
  opacity: 0.8;
}

.btn-block:hover {
  opacity: 1;
}

/* === Skills === */
.skill-grid {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: 2rem;
}

.skill-bar {
  margin-bottom: 1rem;
}

.skill-bar__header {
  display: flex;
  justify-content: space-between;
  margin-bottom: 0.25rem;
}

.skill-bar__name {
  font-size: 1rem;
  font-weight: 500;
}

.skill-bar__level {
  font-size: 0.875rem;
  font-weight: 500;
}

.skill-bar__track {
  width: 100%;
  height: 0.625rem;
  background: var(--track-gray);
  border-radius: 9999px;
}

.skill-bar__fill {
  height: 100%;
  background: var(--accent-deep);
  border-radius: 9999px;
}

.additional-skills {
  margin-top: 3rem;
}

/* === Contact Form === */
.contact-form {
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
}

.input-label {
  display: block;
  font-size: 0.875rem;
  font-weight: 500;
  color: var(--text-secondary);
  margin-bottom: 0.25rem;
}

.input-field {
  width: 100%;
  padding: 0.75rem;
  border-radius: 0.5rem;
  background: var(--card-gray-translucent);
  color: var(--text-primary);
  border: 1px solid var(--border-gray);
  font-family: var(--font-sans);
  transition: border-color var(--transition-card);
}

.input-field:focus {
  border-color: var(--accent-deep);
  outline: none;
}

.textarea {
  resize: vertical;
}

/* === Footer === */
.page-footer {
  padding: 2rem 0;
  text-align: center;
  background: rgba(17, 24, 39, 0.3);
  backdrop-filter: blur(16px);
  color: var(--text-muted);
}

/* === Narrow windows === */
@media (max-width: 768px) {
  .project-grid,
  .skill-grid,
  .bullet-grid {
    grid-template-columns: 1fr;
  }

  .nav-links {
    gap: 0.75rem;
  }

  .hero__name {
    font-size: 3rem;
  }
}
"#;

//! The single-page form. Plain HTML with the six input controls; submits to
//! the JSON predict endpoint and renders the formatted premium plus an echo
//! of the entered values. No styling contract.

use axum::response::Html;

/// GET / - Serve the premium predictor form page
pub async fn form_page() -> Html<&'static str> {
    Html(FORM_PAGE)
}

const FORM_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Insurance Premium Predictor</title>
</head>
<body>
  <h1>Medical Insurance Premium Predictor</h1>
  <p>Enter your details below to get an estimated insurance premium.</p>

  <form id="predict-form">
    <label>Age
      <input type="range" name="age" min="18" max="80" value="25"
             oninput="this.nextElementSibling.textContent = this.value">
      <output>25</output>
    </label><br>

    <label>Gender
      <select name="gender">
        <option>Female</option>
        <option>Male</option>
      </select>
    </label><br>

    <label>BMI (Body Mass Index)
      <input type="range" name="bmi" min="15.0" max="55.0" step="0.1" value="22.0"
             oninput="this.nextElementSibling.textContent = this.value">
      <output>22.0</output>
    </label><br>

    <label>Number of Children
      <input type="range" name="children" min="0" max="5" value="0"
             oninput="this.nextElementSibling.textContent = this.value">
      <output>0</output>
    </label><br>

    <label>Are you a smoker?
      <select name="smoker">
        <option>No</option>
        <option>Yes</option>
      </select>
    </label><br>

    <label>Region
      <select name="region">
        <option>SouthWest</option>
        <option>SouthEast</option>
        <option>NorthWest</option>
        <option>NorthEast</option>
      </select>
    </label><br>

    <button type="submit">Predict Premium</button>
  </form>

  <div id="result"></div>

  <script>
    const form = document.getElementById('predict-form');
    const result = document.getElementById('result');

    form.addEventListener('submit', async (event) => {
      event.preventDefault();
      const data = new FormData(form);
      const body = {
        age: Number(data.get('age')),
        gender: data.get('gender'),
        bmi: Number(data.get('bmi')),
        children: Number(data.get('children')),
        smoker: data.get('smoker'),
        region: data.get('region'),
      };

      const response = await fetch('/api/v1/predict', {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify(body),
      });
      const payload = await response.json();

      if (!response.ok) {
        result.innerHTML = '<p>Error: ' + payload.error.message + '</p>';
        return;
      }

      const p = payload.profile;
      result.innerHTML =
        '<h2>Summary of Your Details</h2>' +
        '<ul>' +
        '<li>Age: ' + p.age + ' years</li>' +
        '<li>Gender: ' + p.gender + '</li>' +
        '<li>BMI: ' + p.bmi + '</li>' +
        '<li>Children: ' + p.children + '</li>' +
        '<li>Smoker: ' + p.smoker + '</li>' +
        '<li>Region: ' + p.region + '</li>' +
        '</ul>' +
        '<h2>Estimated Insurance Premium: ' + payload.formatted + '</h2>';
    });
  </script>
</body>
</html>
"#;

//! Walking the wizard end to end

mod common;

use common::{golden_fork, setup};
use menu_client::{
    CategoryCreate, MealCreate, MealGroupCreate, MenuBuilder, Step, Wizard, WizardError,
};

#[tokio::test]
async fn test_wizard_gates_each_step() {
    let (_backend, client) = setup();
    let builder = MenuBuilder::from_http(client);
    let mut wizard = Wizard::new();

    assert!(!wizard.can_proceed(&builder.state().await));
    assert_eq!(
        wizard.next(&builder.state().await),
        Err(WizardError::StepIncomplete(Step::RestaurantDetails))
    );

    builder.create_restaurant(&golden_fork()).await.unwrap();
    assert_eq!(wizard.next(&builder.state().await), Ok(Step::Categories));

    assert!(!wizard.can_proceed(&builder.state().await));
    let mains = builder.add_category(&CategoryCreate::new("Main Course")).await.unwrap();
    assert_eq!(wizard.next(&builder.state().await), Ok(Step::MealGroups));

    assert!(!wizard.can_proceed(&builder.state().await));
    let pasta = builder
        .add_meal_group(&MealGroupCreate {
            category_id: mains.id,
            name: "Pasta".into(),
        })
        .await
        .unwrap();
    assert_eq!(wizard.next(&builder.state().await), Ok(Step::Meals));

    assert!(wizard.preview(&builder.state().await).is_err());
    builder
        .add_meal(&MealCreate::new(pasta.id, "Rotini").with_size("Regular", 850.0))
        .await
        .unwrap();

    let preview = wizard.preview(&builder.state().await).unwrap();
    assert_eq!(preview.meal_count(), 1);
    assert!(preview.to_string().contains("Regular - KSH 850"));
    assert_eq!(preview, builder.preview().await);
    assert_eq!(wizard.progress(), 100);
}

#[tokio::test]
async fn test_back_never_loses_state() {
    let (_backend, client) = setup();
    let builder = MenuBuilder::from_http(client);
    builder.create_restaurant(&golden_fork()).await.unwrap();
    builder.add_category(&CategoryCreate::new("Main Course")).await.unwrap();

    let mut wizard = Wizard::at(Step::MealGroups);
    assert_eq!(wizard.back(), Ok(Step::Categories));
    assert_eq!(wizard.back(), Ok(Step::RestaurantDetails));

    let state = builder.state().await;
    assert!(state.restaurant_details.is_some());
    assert_eq!(state.categories.len(), 1);
    assert_eq!(wizard.next(&state), Ok(Step::Categories));
}

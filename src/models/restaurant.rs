use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::restaurant::{
    NewRestaurant as DomainNewRestaurant, Restaurant as DomainRestaurant,
    UpdateRestaurant as DomainUpdateRestaurant,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::restaurants)]
pub struct Restaurant {
    pub id: i32,
    pub user_id: String,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub cuisine_type: Option<String>,
    pub total_tables: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::restaurants)]
pub struct NewRestaurant<'a> {
    pub user_id: &'a str,
    pub name: &'a str,
    pub address: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub email: Option<&'a str>,
    pub cuisine_type: Option<&'a str>,
    pub total_tables: i32,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::restaurants)]
pub struct UpdateRestaurant<'a> {
    pub name: Option<&'a str>,
    pub address: Option<Option<&'a str>>,
    pub phone: Option<Option<&'a str>>,
    pub email: Option<Option<&'a str>>,
    pub cuisine_type: Option<Option<&'a str>>,
    pub total_tables: Option<i32>,
    pub updated_at: NaiveDateTime,
}

impl From<Restaurant> for DomainRestaurant {
    fn from(value: Restaurant) -> Self {
        Self {
            id: value.id,
            user_id: value.user_id,
            name: value.name,
            address: value.address,
            phone: value.phone,
            email: value.email,
            cuisine_type: value.cuisine_type,
            total_tables: value.total_tables,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewRestaurant> for NewRestaurant<'a> {
    fn from(value: &'a DomainNewRestaurant) -> Self {
        Self {
            user_id: value.user_id.as_str(),
            name: value.name.as_str(),
            address: value.address.as_deref(),
            phone: value.phone.as_deref(),
            email: value.email.as_deref(),
            cuisine_type: value.cuisine_type.as_deref(),
            total_tables: value.total_tables,
        }
    }
}

impl<'a> From<&'a DomainUpdateRestaurant> for UpdateRestaurant<'a> {
    fn from(value: &'a DomainUpdateRestaurant) -> Self {
        Self {
            name: value.name.as_deref(),
            address: value
                .address
                .as_ref()
                .map(|address| address.as_deref()),
            phone: value.phone.as_ref().map(|phone| phone.as_deref()),
            email: value.email.as_ref().map(|email| email.as_deref()),
            cuisine_type: value
                .cuisine_type
                .as_ref()
                .map(|cuisine| cuisine.as_deref()),
            total_tables: value.total_tables,
            updated_at: value.updated_at,
        }
    }
}

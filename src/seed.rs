use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use sqlx::PgPool;

struct Medicine {
    id: i32,
    name: &'static str,
    cost: Decimal,
}

struct Customer {
    id: i32,
    full_name: &'static str,
    contact_number: &'static str,
    date_of_birth: NaiveDate,
}

struct Purchase {
    purchase_id: i32,
    customer_id: i32,
    medicine_id: i32,
    quantity: i32,
    purchase_date: NaiveDateTime,
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn timestamp(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(h, min, 0).unwrap()
}

fn get_seed_data() -> (Vec<Medicine>, Vec<Customer>, Vec<Purchase>) {
    let medicines = vec![
        Medicine { id: 1, name: "Aspirin", cost: Decimal::new(250, 2) },
        Medicine { id: 2, name: "Amoxicillin", cost: Decimal::new(1275, 2) },
        Medicine { id: 3, name: "Lisinopril", cost: Decimal::new(899, 2) },
        Medicine { id: 4, name: "Levothyroxine", cost: Decimal::new(1050, 2) },
        Medicine { id: 5, name: "Metformin", cost: Decimal::new(100, 2) },
        Medicine { id: 6, name: "Omeprazole", cost: Decimal::new(675, 2) },
    ];

    let customers = vec![
        Customer {
            id: 1,
            full_name: "Amina Otieno",
            contact_number: "+254711000101",
            date_of_birth: date(1985, 2, 11),
        },
        Customer {
            id: 2,
            full_name: "Brian Kamau",
            contact_number: "+254722000202",
            date_of_birth: date(1992, 9, 30),
        },
        Customer {
            id: 3,
            full_name: "Cynthia Wanjiru",
            contact_number: "+254733000303",
            date_of_birth: date(1978, 12, 4),
        },
    ];

    let purchases = vec![
        Purchase { purchase_id: 1, customer_id: 1, medicine_id: 1, quantity: 3, purchase_date: timestamp(2024, 3, 5, 14, 30) },
        Purchase { purchase_id: 1, customer_id: 1, medicine_id: 5, quantity: 2, purchase_date: timestamp(2024, 3, 5, 14, 30) },
        Purchase { purchase_id: 2, customer_id: 2, medicine_id: 2, quantity: 1, purchase_date: timestamp(2024, 3, 6, 9, 15) },
        Purchase { purchase_id: 3, customer_id: 1, medicine_id: 6, quantity: 1, purchase_date: timestamp(2024, 3, 8, 17, 45) },
        Purchase { purchase_id: 4, customer_id: 3, medicine_id: 3, quantity: 2, purchase_date: timestamp(2024, 3, 8, 17, 45) },
        Purchase { purchase_id: 4, customer_id: 3, medicine_id: 4, quantity: 1, purchase_date: timestamp(2024, 3, 8, 17, 45) },
    ];

    (medicines, customers, purchases)
}

pub async fn seed_database(pool: &PgPool) -> Result<(), sqlx::Error> {
    let (medicines, customers, purchases) = get_seed_data();

    for medicine in medicines {
        sqlx::query(
            "INSERT INTO medicines (medicine_id, medicine_name, medicine_cost) VALUES ($1, $2, $3)",
        )
        .bind(medicine.id)
        .bind(medicine.name)
        .bind(medicine.cost)
        .execute(pool)
        .await?;
    }

    for customer in customers {
        sqlx::query(
            "INSERT INTO pharmacy_customers (customer_id, full_name, contact_number, date_of_birth) VALUES ($1, $2, $3, $4)",
        )
        .bind(customer.id)
        .bind(customer.full_name)
        .bind(customer.contact_number)
        .bind(customer.date_of_birth)
        .execute(pool)
        .await?;
    }

    for purchase in purchases {
        sqlx::query(
            "INSERT INTO medicine_bought (purchase_id, customer_id, medicine_id, quantity, purchase_date) VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(purchase.purchase_id)
        .bind(purchase.customer_id)
        .bind(purchase.medicine_id)
        .bind(purchase.quantity)
        .bind(purchase.purchase_date)
        .execute(pool)
        .await?;
    }

    log::info!("Seeded medicines, customers and purchases");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenvy::dotenv().ok();

    let database_url = std::env::var("DATABASE_URL")?;
    let pool = PgPool::connect(&database_url).await?;
    seed_database(&pool).await?;
    Ok(())
}
